// One-shot data fixes. Each submodule is a linear scan-transform-write
// pipeline with its own summary struct; the binaries under src/bin own
// process exit codes and final reporting.

pub mod backfill_owner_names;
pub mod create_public_profiles;
pub mod migrate_public_profiles;
