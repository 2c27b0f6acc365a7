//! Generics: identity, merging, trait bounds, default type parameters and
//! a generic container.

use std::marker::PhantomData;

use crate::catalog::RunContext;
use crate::error::Result;

pub fn identity<T>(item: T) -> T {
    item
}

/// Both values kept side by side; fields stay reachable by name.
#[derive(Debug, Clone, PartialEq)]
pub struct Merged<T, U> {
    pub first: T,
    pub second: U,
}

pub fn merge<T, U>(first: T, second: U) -> Merged<T, U> {
    Merged { first, second }
}

pub trait Lengthy {
    fn length(&self) -> usize;
}

impl Lengthy for str {
    fn length(&self) -> usize {
        self.chars().count()
    }
}

impl Lengthy for String {
    fn length(&self) -> usize {
        self.as_str().length()
    }
}

impl<T> Lengthy for [T] {
    fn length(&self) -> usize {
        self.len()
    }
}

impl<T> Lengthy for Vec<T> {
    fn length(&self) -> usize {
        self.len()
    }
}

pub fn print_double_length<T: Lengthy + ?Sized>(thing: &T) -> usize {
    thing.length() * 2
}

/// An empty collection whose element type defaults to `i64`.
pub struct EmptyArray<T = i64> {
    _marker: PhantomData<T>,
}

impl<T> EmptyArray<T> {
    pub fn make() -> Vec<T> {
        Vec::new()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Song {
    pub title: String,
    pub artist: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Video {
    pub title: String,
    pub creator: String,
    pub resolution: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Playlist<T> {
    queue: Vec<T>,
}

impl<T> Playlist<T> {
    pub fn new() -> Self {
        Self { queue: Vec::new() }
    }

    pub fn add(&mut self, item: T) {
        self.queue.push(item);
    }

    pub fn queue(&self) -> &[T] {
        &self.queue
    }
}

impl<T> Default for Playlist<T> {
    fn default() -> Self {
        Self::new()
    }
}

pub fn run(ctx: &mut RunContext<'_>) -> Result<()> {
    writeln!(ctx.out, "identity: {}", identity("Walter"))?;

    let merged = merge(("Jesse", 26), vec!["cook", "sell"]);
    writeln!(ctx.out, "merged: {:?} + {:?}", merged.first, merged.second)?;

    writeln!(ctx.out, "double length of \"hello\": {}", print_double_length("hello"))?;
    writeln!(ctx.out, "double length of [1, 2, 3]: {}", print_double_length(&[1, 2, 3][..]))?;

    let numbers = <EmptyArray>::make();
    writeln!(ctx.out, "default empty array: {numbers:?}")?;

    let mut songs = Playlist::new();
    songs.add(Song {
        title: "Baby Blue".into(),
        artist: "Badfinger".into(),
    });
    let mut videos: Playlist<Video> = Playlist::new();
    videos.add(Video {
        title: "Pilot".into(),
        creator: "AMC".into(),
        resolution: "1080p".into(),
    });
    writeln!(ctx.out, "songs: {}, videos: {}", songs.queue().len(), videos.queue().len())?;
    Ok(())
}
