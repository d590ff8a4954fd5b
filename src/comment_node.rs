use super::*;

#[derive(Clone, Debug)]
pub(crate) enum CommentNode {
  Comment(Comment),
  More(MoreComments),
}
