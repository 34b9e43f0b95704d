#![no_std]

pub mod ws2812;
