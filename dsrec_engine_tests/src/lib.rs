//! End-to-end tests of `dsrec_engine` live under `tests/`.
