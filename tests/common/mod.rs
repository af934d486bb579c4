#![allow(dead_code)]

pub mod brute_force;
