use thiserror::Error;

#[derive(Error, Debug)]
pub enum RepositoryError {
    #[error(transparent)]
    DynamoDb(#[from] aws_sdk_dynamodb::Error),
}
