//! Raw link-layer transmit abstraction.
//!
//! The announcer only ever needs "write these bytes as one frame on this
//! interface". Hiding that behind a trait pair keeps the real datalink
//! channel out of the tests, which substitute a capturing fake.

use pnet::datalink::{self, Channel, DataLinkSender};

use super::interface::Interface;
use crate::error::{Error, Result};

/// A handle bound to one interface that emits raw frames.
pub trait FrameSender {
    /// Send exactly the given bytes as one link-layer frame.
    fn send(&mut self, frame: &[u8]) -> Result<()>;
}

/// Opens a fresh [`FrameSender`] for an interface.
///
/// One handle is opened per interface announcement pass and dropped when the
/// pass ends; handles are never reused across interfaces.
pub trait Transmitter {
    type Sender: FrameSender;

    fn open(&self, interface: &Interface) -> Result<Self::Sender>;
}

/// Production transmitter backed by a pnet datalink channel.
pub struct PnetTransmitter;

impl Transmitter for PnetTransmitter {
    type Sender = PnetSender;

    fn open(&self, interface: &Interface) -> Result<PnetSender> {
        PnetSender::open(&interface.name)
    }
}

/// Production frame sender using pnet.
pub struct PnetSender {
    interface: String,
    tx: Box<dyn DataLinkSender>,
}

impl PnetSender {
    /// Open a datalink channel on the named interface.
    pub fn open(name: &str) -> Result<Self> {
        let iface = datalink::interfaces()
            .into_iter()
            .find(|iface| iface.name == name)
            .ok_or_else(|| Error::Transmit {
                interface: name.to_string(),
                reason: "interface not found".into(),
            })?;

        let tx = match datalink::channel(&iface, datalink::Config::default()) {
            Ok(Channel::Ethernet(tx, _rx)) => tx,
            Ok(_) => {
                return Err(Error::Transmit {
                    interface: name.to_string(),
                    reason: "unsupported channel type".into(),
                });
            }
            Err(e) => {
                return Err(Error::Transmit {
                    interface: name.to_string(),
                    reason: e.to_string(),
                });
            }
        };

        Ok(Self {
            interface: name.to_string(),
            tx,
        })
    }
}

impl FrameSender for PnetSender {
    fn send(&mut self, frame: &[u8]) -> Result<()> {
        self.tx
            .send_to(frame, None)
            .ok_or_else(|| Error::Transmit {
                interface: self.interface.clone(),
                reason: "send returned no result".into(),
            })?
            .map_err(|e| Error::Transmit {
                interface: self.interface.clone(),
                reason: e.to_string(),
            })?;
        Ok(())
    }
}
