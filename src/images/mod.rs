pub mod codec;
pub mod consts;
pub mod errors;
pub mod format;
pub mod handlers;
pub mod http;
pub mod requests;
pub mod resize;
pub mod responses;
pub mod source;
#[cfg(test)]
mod tests;
