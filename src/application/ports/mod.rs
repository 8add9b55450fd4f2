pub mod hosting;

pub use hosting::HostingApi;
