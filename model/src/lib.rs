pub mod arn;
