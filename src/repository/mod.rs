pub mod mysql_repository_impl;
