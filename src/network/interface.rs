//! Host interface snapshots and the announcement eligibility filter.
//!
//! Interfaces are captured as plain records so that the filter and the
//! announcer can be exercised without touching the OS. Addresses are kept in
//! CIDR notation exactly as the OS reports them; parsing happens at the point
//! of use so a malformed entry surfaces as a hard error instead of being
//! silently dropped.

use ipnetwork::IpNetwork;
use pnet::datalink::{self, NetworkInterface};
use pnet::util::MacAddr;

use crate::error::{Error, Result};

/// Read-only snapshot of one host network interface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Interface {
    pub name: String,
    /// All-zero when the OS reports no hardware address.
    pub hwaddr: MacAddr,
    pub is_up: bool,
    pub is_loopback: bool,
    /// Assigned addresses in CIDR notation, IPv4 and IPv6 mixed.
    pub addrs: Vec<String>,
}

impl From<&NetworkInterface> for Interface {
    fn from(iface: &NetworkInterface) -> Self {
        Self {
            name: iface.name.clone(),
            hwaddr: iface.mac.unwrap_or_else(MacAddr::zero),
            is_up: iface.is_up(),
            is_loopback: iface.is_loopback(),
            addrs: iface.ips.iter().map(ToString::to_string).collect(),
        }
    }
}

/// Snapshot the live host interfaces, in OS enumeration order.
///
/// Each call re-queries the OS; nothing is cached between passes.
pub fn host_interfaces() -> Vec<Interface> {
    datalink::interfaces().iter().map(Interface::from).collect()
}

/// Filter a snapshot down to the interfaces acceptable for sending
/// gratuitous ARP replies on:
///
/// - they must not be loopback
/// - they must be up
/// - they must have at least one IPv4 address
///
/// Enumeration order is preserved, and an empty result is not an error. An
/// address that fails CIDR parsing aborts the whole filter: it signals an
/// unexpected environment, not a skippable entry.
pub fn eligible_interfaces(interfaces: &[Interface]) -> Result<Vec<Interface>> {
    let mut eligible = Vec::new();
    for iface in interfaces {
        if iface.is_loopback || !iface.is_up {
            continue;
        }

        let mut ipv4_count = 0;
        for addr in &iface.addrs {
            let network: IpNetwork = addr.parse().map_err(|source| Error::AddressParse {
                interface: iface.name.clone(),
                addr: addr.clone(),
                source,
            })?;
            if network.is_ipv4() {
                ipv4_count += 1;
            }
        }

        if ipv4_count == 0 {
            continue;
        }

        eligible.push(iface.clone());
    }
    Ok(eligible)
}

/// Resolve configured interface names against a snapshot, preserving the
/// order the names were given in. A name with no matching interface is an
/// enumeration error.
pub fn named_interfaces(interfaces: &[Interface], names: &[String]) -> Result<Vec<Interface>> {
    names
        .iter()
        .map(|name| {
            interfaces
                .iter()
                .find(|iface| &iface.name == name)
                .cloned()
                .ok_or_else(|| Error::Enumeration(format!("interface {name:?} not found")))
        })
        .collect()
}
