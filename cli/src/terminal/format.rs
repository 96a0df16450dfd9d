use std::net::IpAddr;

use colored::*;

use crate::terminal::colors;

pub fn host(ip: &IpAddr) -> ColoredString {
    match ip {
        IpAddr::V4(ipv4_addr) => ipv4_addr.to_string().color(colors::IPV4_ADDR),
        IpAddr::V6(ipv6_addr) => ipv6_addr.to_string().color(colors::IPV6_ADDR),
    }
}

pub fn verdict(up: bool) -> ColoredString {
    if up {
        "up".color(colors::UP).bold()
    } else {
        "down".color(colors::DOWN)
    }
}

/// Pads a possibly coloured cell to `width` visible columns.
pub fn pad(cell: &str, width: usize) -> String {
    let visible = console::measure_text_width(cell);
    format!("{}{}", cell, " ".repeat(width.saturating_sub(visible)))
}
