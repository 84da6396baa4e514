#![doc = include_str!("../README.md")]
#![no_std]
#![forbid(unsafe_code)]

extern crate alloc;

mod error;
mod queue;

pub use self::{
    error::IndexOutOfRange,
    queue::RingQueue,
};
