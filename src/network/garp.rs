//! Gratuitous ARP frame construction.
//!
//! A gratuitous ARP is an unsolicited ARP reply broadcast to the local
//! segment, with identical sender and target protocol addresses, so that
//! peers refresh their caches before any traffic flows (RFC 826, RFC 5227).

use std::net::Ipv4Addr;

use pnet::packet::arp::{ArpHardwareTypes, ArpOperations, MutableArpPacket};
use pnet::packet::ethernet::{EtherTypes, MutableEthernetPacket};
use pnet::util::MacAddr;

use crate::error::{Error, Result};

/// Broadcast MAC address, used both as the frame destination and the ARP
/// target hardware address.
const BROADCAST_MAC: MacAddr = MacAddr(0xff, 0xff, 0xff, 0xff, 0xff, 0xff);

/// Size of an ARP packet payload.
pub const ARP_PACKET_SIZE: usize = 28;

/// Size of an Ethernet header.
const ETHERNET_HEADER_SIZE: usize = 14;

/// Size of an Ethernet frame with ARP payload.
pub const GARP_FRAME_SIZE: usize = ETHERNET_HEADER_SIZE + ARP_PACKET_SIZE;

/// Encode the 28-byte gratuitous ARP reply payload for `ip` at `hwaddr`.
///
/// Deterministic: the same inputs always yield the same bytes. The subnet
/// mask accompanies the address everywhere in the announcement path but does
/// not appear in the ARP payload itself.
pub fn garp_payload(
    hwaddr: MacAddr,
    ip: Ipv4Addr,
    _mask: Ipv4Addr,
) -> Result<[u8; ARP_PACKET_SIZE]> {
    let mut buffer = [0u8; ARP_PACKET_SIZE];

    {
        let mut arp = MutableArpPacket::new(&mut buffer)
            .ok_or_else(|| Error::Serialization("ARP payload buffer too small".into()))?;
        arp.set_hardware_type(ArpHardwareTypes::Ethernet);
        arp.set_protocol_type(EtherTypes::Ipv4);
        arp.set_hw_addr_len(6);
        arp.set_proto_addr_len(4);
        arp.set_operation(ArpOperations::Reply);
        arp.set_sender_hw_addr(hwaddr);
        arp.set_sender_proto_addr(ip);
        arp.set_target_hw_addr(BROADCAST_MAC);
        arp.set_target_proto_addr(ip);
    }

    Ok(buffer)
}

/// Build the complete 42-byte broadcast Ethernet frame carrying the
/// gratuitous ARP payload for `ip` at `hwaddr`.
pub fn garp_frame(hwaddr: MacAddr, ip: Ipv4Addr, mask: Ipv4Addr) -> Result<Vec<u8>> {
    let payload = garp_payload(hwaddr, ip, mask)?;
    let mut buffer = vec![0u8; GARP_FRAME_SIZE];

    {
        let mut ethernet = MutableEthernetPacket::new(&mut buffer)
            .ok_or_else(|| Error::Serialization("Ethernet header buffer too small".into()))?;
        ethernet.set_destination(BROADCAST_MAC);
        ethernet.set_source(hwaddr);
        ethernet.set_ethertype(EtherTypes::Arp);
    }
    buffer[ETHERNET_HEADER_SIZE..].copy_from_slice(&payload);

    Ok(buffer)
}
