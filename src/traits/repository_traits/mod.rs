pub mod sqlite_repository;
