//! garpd - a gratuitous ARP announcer.
//!
//! garpd selects the host's eligible network interfaces and broadcasts a
//! [gratuitous ARP] reply for each of their IPv4 addresses, so that peers on
//! the local segment refresh their address-resolution caches before any
//! traffic flows between them.
//!
//! [gratuitous ARP]: https://wiki.wireshark.org/Gratuitous_ARP
//!
//! # Architecture
//!
//! The crate is organized into a few modules:
//!
//! - [`config`]: Configuration loading and validation
//! - [`network`]: Interface selection, frame construction, and transmission
//! - [`error`]: Error types
//!
//! # Testing
//!
//! The raw link-layer write sits behind a trait, so everything up to the wire
//! can be exercised without network access, and frame construction is a pure
//! function:
//!
//! ```rust
//! use garpd::network::garp_frame;
//! use pnet::util::MacAddr;
//!
//! let frame = garp_frame(
//!     MacAddr::new(0x06, 0x00, 0xac, 0x10, 0x00, 0x02),
//!     "192.168.1.1".parse().unwrap(),
//!     "255.255.255.0".parse().unwrap(),
//! )
//! .unwrap();
//! assert_eq!(frame.len(), 42);
//! ```

pub mod config;
pub mod error;
pub mod network;

pub use config::Config;
pub use error::{Error, Result};
