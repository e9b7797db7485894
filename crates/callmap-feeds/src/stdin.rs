//! Stdin feed — reads records piped into the process (`callmap -`).

use crate::lines::UniversalLines;
use crate::{LineFeed, Lines};

#[derive(Debug, Default)]
pub struct StdinFeed;

impl StdinFeed {
    pub fn new() -> Self {
        Self
    }
}

impl LineFeed for StdinFeed {
    fn name(&self) -> String {
        "<stdin>".to_string()
    }

    fn lines(self: Box<Self>) -> Lines {
        Box::new(UniversalLines::new(std::io::stdin().lock()))
    }
}
