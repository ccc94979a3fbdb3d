use super::PostCommandService;
use crate::{
    application::{
        dto::PostDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::post::PostId,
};
use tracing::info;

pub struct SetPublishStateCommand {
    pub id: i64,
    pub publish: bool,
}

impl PostCommandService {
    pub async fn set_publish_state(
        &self,
        command: SetPublishStateCommand,
    ) -> ApplicationResult<PostDto> {
        let id = PostId::new(command.id)?;
        let mut post = self
            .read_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("post not found"))?;

        if post.published == command.publish {
            return Ok(post.into());
        }

        let now = self.clock.now();
        if command.publish {
            post.publish(now);
        } else {
            post.unpublish(now);
        }

        let updated = self.write_repo.update(post).await?;
        info!(post_id = id.0, published = updated.published, "post publish state changed");
        Ok(updated.into())
    }
}
