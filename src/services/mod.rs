pub mod share;

pub use share::ShareService;
