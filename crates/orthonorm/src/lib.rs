#![doc = env!("CARGO_PKG_DESCRIPTION")]

#[doc(inline)]
pub use orthonorm_tensor as tensor;

#[doc(inline)]
pub use orthonorm_ops as ops;
