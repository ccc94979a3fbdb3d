use std::collections::HashMap;

use crate::domain::comment::entity::Comment;
use crate::domain::comment::value_objects::CommentId;

#[derive(Debug, Clone)]
pub struct CommentNode {
    pub comment: Comment,
    pub replies: Vec<CommentNode>,
}

/// Deepest nesting level a reply may sit at; top-level comments are level 0.
pub const MAX_REPLY_DEPTH: usize = 32;

/// Arrange a post's comments into reply trees, oldest first at every level.
///
/// With `include_pending == false` unapproved comments are dropped, and so is
/// everything beneath them: a reply is only reachable through its parent.
pub fn build_thread(comments: Vec<Comment>, include_pending: bool) -> Vec<CommentNode> {
    let mut children: HashMap<Option<CommentId>, Vec<Comment>> = HashMap::new();
    for comment in comments {
        if include_pending || comment.is_approved() {
            children.entry(comment.parent_id).or_default().push(comment);
        }
    }
    for siblings in children.values_mut() {
        siblings.sort_by(|a, b| a.created_at.cmp(&b.created_at).then(a.id.cmp(&b.id)));
    }

    // pre-order walk on an explicit stack
    let mut order = Vec::new();
    let mut stack: Vec<Comment> = children.remove(&None).unwrap_or_default();
    stack.reverse();
    while let Some(comment) = stack.pop() {
        if let Some(mut replies) = children.remove(&Some(comment.id)) {
            replies.reverse();
            stack.extend(replies);
        }
        order.push(comment);
    }

    // reverse pre-order sees every reply before its parent
    let mut built: HashMap<CommentId, Vec<CommentNode>> = HashMap::new();
    let mut roots = Vec::new();
    for comment in order.into_iter().rev() {
        let mut replies = built.remove(&comment.id).unwrap_or_default();
        replies.reverse();
        let parent = comment.parent_id;
        let node = CommentNode { comment, replies };
        match parent {
            Some(parent) => built.entry(parent).or_default().push(node),
            None => roots.push(node),
        }
    }
    roots.reverse();
    roots
}
