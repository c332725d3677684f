pub mod mysql_repository;
