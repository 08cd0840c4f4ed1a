pub mod routing_error;
