use scrypto::prelude::*;

/// A single guestbook entry.
///
/// `address` and `date` are taken from the execution context of the call
/// that created the entry, never from caller input.
#[derive(Debug, Clone, Eq, PartialEq, ScryptoSbor)]
pub struct Comment {
    pub address: ComponentAddress,
    pub date: Instant,
    pub text: String,
}

/// Emitted once per appended comment.
#[derive(Debug, Clone, Eq, PartialEq, ScryptoSbor, ScryptoEvent)]
pub struct CommentAddedEvent {
    pub comment: Comment,
}

#[blueprint]
#[events(CommentAddedEvent)]
mod guestbook {
    struct Guestbook {
        comments: Vec<Comment>,
    }

    impl Guestbook {
        /// Creates a guestbook with an empty comment list. The component has
        /// no owner and no method restrictions: anyone may post.
        pub fn instantiate() -> Global<Guestbook> {
            Self {
                comments: Vec::new(),
            }
            .instantiate()
            .prepare_to_globalize(OwnerRole::None)
            .globalize()
        }

        /// Appends one comment to the end of the list.
        ///
        /// There is no ambient transaction sender on this network, so the
        /// caller names their account and must hold its owner badge in the
        /// auth zone. The recorded address therefore always belongs to the
        /// account that actually signed the transaction.
        ///
        /// `text` is stored as-is: no length bound, no content checks.
        pub fn add_comment(&mut self, author: Global<Account>, text: String) {
            Runtime::assert_access_rule(author.get_owner_role().rule);

            let comment = Comment {
                address: author.address(),
                date: Clock::current_time_rounded_to_seconds(),
                text,
            };
            self.comments.push(comment.clone());
            Runtime::emit_event(CommentAddedEvent { comment });
        }
    }
}
