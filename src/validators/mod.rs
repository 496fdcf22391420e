pub mod ticket_validator;
