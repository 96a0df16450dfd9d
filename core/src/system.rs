/// Whether this process may open raw sockets.
///
/// Checked once per run to filter the scan catalog.
pub fn is_elevated() -> bool {
    is_root::is_root()
}
