pub mod sqlite_repository_impl;
