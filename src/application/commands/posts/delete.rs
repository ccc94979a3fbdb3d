use super::PostCommandService;
use crate::{
    application::error::ApplicationResult,
    domain::post::PostId,
};
use tracing::info;

pub struct DeletePostCommand {
    pub id: i64,
}

impl PostCommandService {
    pub async fn delete_post(&self, command: DeletePostCommand) -> ApplicationResult<()> {
        let id = PostId::new(command.id)?;
        self.write_repo.delete(id).await?;
        info!(post_id = id.0, "post deleted");
        Ok(())
    }
}
