pub mod customer;
pub mod domain_counts;
