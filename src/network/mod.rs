//! Network-related modules: interface selection, frame construction, and
//! raw transmission.

mod announce;
mod garp;
mod interface;
mod transmit;

pub use announce::{Announcement, announce_interface};
pub use garp::{ARP_PACKET_SIZE, GARP_FRAME_SIZE, garp_frame, garp_payload};
pub use interface::{Interface, eligible_interfaces, host_interfaces, named_interfaces};
pub use transmit::{FrameSender, PnetSender, PnetTransmitter, Transmitter};
