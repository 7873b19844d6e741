pub mod export;
#[cfg(feature = "fft")]
pub mod fft;
pub mod filter;
pub mod lab;
pub mod noise;
pub mod signal;
pub mod trace_look;
