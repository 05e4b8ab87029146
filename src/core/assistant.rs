use crate::core::conversation::Conversation;
use crate::core::prompt;
use crate::core::render;
use crate::core::selection::Selection;
use crate::domain::model::{ChatResponse, Citation, Product, Reply, Role};
use crate::domain::ports::{ChatClient, Storage};
use crate::utils::error::{AppError, Result};

/// Selection + conversation state, persisted through `Storage`, talking to a `ChatClient`.
pub struct Assistant<C: ChatClient, S: Storage> {
    client: C,
    storage: S,
    selection: Selection,
    conversation: Conversation,
}

impl<C: ChatClient, S: Storage> Assistant<C, S> {
    pub fn new(client: C, storage: S) -> Self {
        Self {
            client,
            storage,
            selection: Selection::new(),
            conversation: Conversation::new(),
        }
    }

    /// Restores saved selection and conversation from storage.
    pub async fn load(client: C, storage: S) -> Self {
        let selection = Selection::load(&storage).await;
        let conversation = Conversation::load(&storage).await;
        Self {
            client,
            storage,
            selection,
            conversation,
        }
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn conversation(&self) -> &Conversation {
        &self.conversation
    }

    pub async fn toggle_product(&mut self, product: &Product) -> Result<bool> {
        let selected = self.selection.toggle(product);
        tracing::debug!(
            "Product {} ({}) {}",
            product.id,
            product.name,
            if selected { "selected" } else { "deselected" }
        );
        self.selection.save(&self.storage).await?;
        Ok(selected)
    }

    pub async fn remove_product(&mut self, id: u32) -> Result<bool> {
        let removed = self.selection.remove(id);
        if removed {
            self.selection.save(&self.storage).await?;
        }
        Ok(removed)
    }

    pub async fn clear_selection(&mut self) -> Result<()> {
        self.selection.clear();
        self.selection.save(&self.storage).await
    }

    /// Starts a fresh conversation with a routine for the selected products.
    pub async fn generate_routine(&mut self) -> Result<Reply> {
        if !self.selection.can_generate() {
            return Err(AppError::EmptySelectionError);
        }

        self.conversation.clear();
        self.conversation.save(&self.storage).await?;

        let request = prompt::routine_request(&self.selection.details())?;
        tracing::info!(
            "Requesting routine for {} products",
            self.selection.len()
        );
        let response = self.client.complete(&prompt::routine_input(&request)).await?;
        let (text, citations) = Self::accept(response)?;

        self.conversation.push(Role::User, request);
        self.conversation.push(Role::Assistant, text.clone());
        self.conversation.save(&self.storage).await?;

        let html = render::routine_panel(&text, &citations);
        Ok(Reply {
            text,
            citations,
            html,
        })
    }

    /// Asks a follow-up question. The question stays in history even if the request fails.
    pub async fn send_message(&mut self, message: &str) -> Result<Reply> {
        let message = message.trim();
        if message.is_empty() {
            return Err(AppError::EmptyMessageError);
        }

        self.conversation.push(Role::User, message);
        self.conversation.save(&self.storage).await?;

        tracing::info!(
            "Sending chat message ({} messages in history)",
            self.conversation.len()
        );
        let response = self
            .client
            .complete(&prompt::chat_input(&self.conversation))
            .await?;
        let (text, citations) = Self::accept(response)?;

        self.conversation.push(Role::Assistant, text.clone());
        self.conversation.save(&self.storage).await?;

        let html = render::assistant_message(&text, &citations);
        Ok(Reply {
            text,
            citations,
            html,
        })
    }

    fn accept(response: ChatResponse) -> Result<(String, Vec<Citation>)> {
        let citations = response.citations().to_vec();
        match response.output_text {
            Some(text) if !text.is_empty() => {
                tracing::debug!(
                    "Received {} chars with {} citations",
                    text.len(),
                    citations.len()
                );
                Ok((text, citations))
            }
            _ => Err(AppError::InvalidResponseError {
                message: "missing output_text".to_string(),
            }),
        }
    }
}
