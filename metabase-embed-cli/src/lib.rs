//! # metabase-embed-cli
//!
//! Command-line front end for [`metabase_embed`].
//!
//! | Command | Description |
//! |---------|-------------|
//! | `metabase-embed url <kind> <id>` | Print a signed embed URL |
//! | `metabase-embed iframe <kind> <id>` | Print an iframe snippet |
//! | `metabase-embed token <kind> <id>` | Print only the signed token |
//!
//! Configuration comes from `--config <file.yaml>` or, without it, from the
//! `METABASE_*` environment variables (a `.env` file is loaded first).

pub mod commands;
