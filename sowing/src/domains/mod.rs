pub mod targeting;
