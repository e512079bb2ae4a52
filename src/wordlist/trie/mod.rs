pub mod arraytrie;
pub mod maptrie;
pub mod multithreaded_search;
pub mod searchconfig;
pub mod unique;

mod haschildren;
mod search;
