mod common;

mod calculator;
mod classify;
