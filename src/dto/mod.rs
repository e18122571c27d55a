pub mod search_dto;
