//! Per-interface announcement orchestration.

use std::net::Ipv4Addr;

use ipnetwork::IpNetwork;
use pnet::util::MacAddr;

use super::garp::garp_frame;
use super::interface::Interface;
use super::transmit::{FrameSender, Transmitter};
use crate::error::{Error, Result};

/// Record of one gratuitous ARP that reached the transmitter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Announcement {
    pub interface: String,
    pub hwaddr: MacAddr,
    pub ip: Ipv4Addr,
}

/// Send a gratuitous ARP for every IPv4 address on `interface`, provided it
/// meets the same criteria as in
/// [`eligible_interfaces`](super::interface::eligible_interfaces).
///
/// The up flag is re-checked here: interface state may have changed between
/// selection and use. One transmit handle is opened for the whole pass.
/// Non-IPv4 addresses are skipped; a malformed address, a frame construction
/// failure, or a failed write aborts the remaining addresses on this
/// interface. The observer is invoked once per frame sent, as it is sent, so
/// records delivered before a failure remain delivered. Returns the number
/// of frames sent.
pub fn announce_interface<T, F>(
    interface: &Interface,
    transmitter: &T,
    mut observe: F,
) -> Result<usize>
where
    T: Transmitter,
    F: FnMut(&Announcement),
{
    if !interface.is_up {
        return Err(Error::InterfaceDown(interface.name.clone()));
    }

    let mut sender = transmitter.open(interface)?;
    let mut sent = 0;

    for addr in &interface.addrs {
        let network: IpNetwork = addr.parse().map_err(|source| Error::AddressParse {
            interface: interface.name.clone(),
            addr: addr.clone(),
            source,
        })?;
        let IpNetwork::V4(network) = network else {
            continue;
        };

        let frame = garp_frame(interface.hwaddr, network.ip(), network.mask())?;
        sender.send(&frame)?;

        sent += 1;
        observe(&Announcement {
            interface: interface.name.clone(),
            hwaddr: interface.hwaddr,
            ip: network.ip(),
        });
    }

    Ok(sent)
}

#[cfg(test)]
mod tests {
    use super::super::garp::GARP_FRAME_SIZE;
    use super::super::transmit::tests::{FailingTransmitter, MockTransmitter};
    use super::*;

    fn test_interface() -> Interface {
        Interface {
            name: "eth0".to_string(),
            hwaddr: MacAddr::new(0x06, 0x00, 0xac, 0x10, 0x00, 0x02),
            is_up: true,
            is_loopback: false,
            addrs: vec!["192.168.1.1/24".to_string()],
        }
    }

    #[test]
    fn should_send_one_frame_per_ipv4_address() {
        let mut iface = test_interface();
        iface.addrs.push("10.0.0.1/8".to_string());
        let transmitter = MockTransmitter::new();
        let mut seen = Vec::new();

        let sent = announce_interface(&iface, &transmitter, |a| seen.push(a.clone())).unwrap();

        assert_eq!(sent, 2);
        assert_eq!(transmitter.sender.sent_count(), 2);
        assert_eq!(seen.len(), 2);
        assert_eq!(seen[0].ip, Ipv4Addr::new(192, 168, 1, 1));
        assert_eq!(seen[1].ip, Ipv4Addr::new(10, 0, 0, 1));
        assert!(seen.iter().all(|a| a.interface == "eth0"));
    }

    #[test]
    fn should_skip_ipv6_addresses_without_error() {
        let mut iface = test_interface();
        iface.addrs.push("fe80::1/64".to_string());
        let transmitter = MockTransmitter::new();

        let sent = announce_interface(&iface, &transmitter, |_| {}).unwrap();

        assert_eq!(sent, 1);
        assert_eq!(transmitter.sender.sent_count(), 1);
    }

    #[test]
    fn should_error_when_interface_is_down() {
        let mut iface = test_interface();
        iface.is_up = false;
        let transmitter = MockTransmitter::new();

        let err = announce_interface(&iface, &transmitter, |_| {}).unwrap_err();

        assert!(matches!(err, Error::InterfaceDown(_)));
        assert_eq!(err.to_string(), "interface eth0 is down");
        assert_eq!(transmitter.sender.sent_count(), 0);
        assert_eq!(transmitter.opens(), 0);
    }

    #[test]
    fn should_abort_on_malformed_address_after_earlier_sends() {
        let mut iface = test_interface();
        iface.addrs.push("bogus/24".to_string());
        iface.addrs.push("10.0.0.1/8".to_string());
        let transmitter = MockTransmitter::new();
        let mut seen = Vec::new();

        let err =
            announce_interface(&iface, &transmitter, |a| seen.push(a.clone())).unwrap_err();

        assert!(matches!(err, Error::AddressParse { .. }));
        // The frame for the first address went out; nothing after the
        // malformed entry did.
        assert_eq!(transmitter.sender.sent_count(), 1);
        assert_eq!(seen.len(), 1);
        assert_eq!(seen[0].ip, Ipv4Addr::new(192, 168, 1, 1));
    }

    #[test]
    fn should_surface_transmit_failure() {
        let iface = test_interface();
        let mut observed = 0;

        let err = announce_interface(&iface, &FailingTransmitter, |_| observed += 1).unwrap_err();

        assert!(matches!(err, Error::Transmit { .. }));
        assert_eq!(observed, 0);
    }

    #[test]
    fn should_open_one_handle_per_pass() {
        let mut iface = test_interface();
        iface.addrs.push("10.0.0.1/8".to_string());
        iface.addrs.push("172.16.0.1/12".to_string());
        let transmitter = MockTransmitter::new();

        announce_interface(&iface, &transmitter, |_| {}).unwrap();

        assert_eq!(transmitter.opens(), 1);
    }

    #[test]
    fn should_surface_handle_open_failure() {
        let iface = test_interface();
        let transmitter = MockTransmitter {
            fail_open: true,
            ..MockTransmitter::new()
        };

        let err = announce_interface(&iface, &transmitter, |_| {}).unwrap_err();

        assert!(matches!(err, Error::Transmit { .. }));
        assert_eq!(transmitter.sender.sent_count(), 0);
    }

    #[test]
    fn should_put_announced_frames_on_the_wire_verbatim() {
        let iface = test_interface();
        let transmitter = MockTransmitter::new();

        announce_interface(&iface, &transmitter, |_| {}).unwrap();

        let frame = transmitter.sender.last_sent().unwrap();
        assert_eq!(frame.len(), GARP_FRAME_SIZE);
        let expected = garp_frame(
            iface.hwaddr,
            Ipv4Addr::new(192, 168, 1, 1),
            Ipv4Addr::new(255, 255, 255, 0),
        )
        .unwrap();
        assert_eq!(frame, expected);
    }
}
