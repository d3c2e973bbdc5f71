pub struct UpsertFileDto {
    pub owner: String,
    pub repo: String,
    pub path: String,
    pub branch: String,
    pub message: String,
    pub content: String,
}
