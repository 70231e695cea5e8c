pub const WILDCARD: &str = "*";

/// ARN prefix shared by every repository in one region/account pair.
pub struct RepositoryPrefix(String);

impl RepositoryPrefix {
    pub fn new(region: &str, account_id: &str) -> Self {
        RepositoryPrefix(format!("arn:aws:ecr:{}:{}:repository/", region, account_id))
    }

    pub fn arn(&self, repository: &str) -> String {
        format!("{}{}", self.0, repository)
    }
}

// Everything after the first `:` is a tag and does not name the repository.
pub fn repository_name(filter: &str) -> &str {
    filter.split(':').next().unwrap_or(filter)
}

/// Builds one ARN per filter, preserving order and duplicates. A wildcard
/// filter collapses the whole list to the single wildcard ARN.
pub fn repository_arns(prefix: &RepositoryPrefix, filters: &[&str]) -> Vec<String> {
    let mut arns = Vec::with_capacity(filters.len());

    for filter in filters {
        let repository = repository_name(filter);
        if repository == WILDCARD {
            return vec![prefix.arn(WILDCARD)];
        }

        arns.push(prefix.arn(repository));
    }

    arns
}
