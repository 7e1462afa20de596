mod scenario;
mod stats;
