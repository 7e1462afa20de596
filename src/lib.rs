pub mod clinic;
pub mod rvg;
pub mod sim;
pub mod stats;
pub mod trace;

#[cfg(test)]
mod test;
