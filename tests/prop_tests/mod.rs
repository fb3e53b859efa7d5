mod aggregate;
mod stats;
