/// Everything needed to propose a single file through a pull request.
///
/// `new_branch` is expected to be derived from `title` so that resubmitting the
/// same title lands on the same branch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PullRequestSpec {
    pub owner: String,
    pub repo: String,
    pub target_branch: String,
    pub new_branch: String,
    pub title: String,
    pub file_path: String,
    /// Base64 encoded file content.
    pub content: String,
}
