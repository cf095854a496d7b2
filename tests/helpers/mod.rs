#![allow(dead_code)]

pub mod sentence_assertions;
pub mod sentence_fixtures;
