//! Unit coverage for the Roamsignal CLI.
