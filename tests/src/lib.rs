//! Integration tests for the full target → scan → report pipeline.
//!
//! Nothing here needs nmap or network access: the scanner and the resolver
//! are replaced by stubs from [`utils`].

#[cfg(test)]
mod compare;
#[cfg(test)]
mod utils;
