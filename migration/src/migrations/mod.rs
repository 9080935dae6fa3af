pub mod m202606010001_create_users;
pub mod m202606010002_create_events;
pub mod m202606010003_create_tickets;
