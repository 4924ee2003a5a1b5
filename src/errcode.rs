//! Demosaic error codes.

use quick_error::quick_error;
use std::io;

pub type BayerResult<T> = Result<T, BayerError>;

quick_error! {
    #[derive(Debug)]
    pub enum BayerError {
        NoInput {
            display("No input")
        }

        WrongResolution(h: usize, w: usize) {
            display("Wrong resolution {}x{}, both dimensions must be even", h, w)
        }
        WrongDepth(bits: u32) {
            display("Wrong depth: {} bits per sample", bits)
        }
        WrongShape(shape: Vec<usize>) {
            display("Unsupported shape {:?}", shape)
        }
        AlreadyDemosaiced(shape: Vec<usize>) {
            display("Shape {:?} is already a 3-channel image", shape)
        }
        SizeMismatch(expected: usize, got: usize) {
            display("Buffer size mismatch: expected {} samples, got {}", expected, got)
        }
        UnknownCfa(name: String) {
            display("Unknown CFA pattern {:?}", name)
        }

        Io(err: io::Error) {
            from()
            display("IO error: {}", err)
        }
    }
}
