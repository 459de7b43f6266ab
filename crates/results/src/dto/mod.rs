pub mod upcoming;
