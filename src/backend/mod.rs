pub mod sha256_commit;
