//! Annotation pipeline — scores every product in a batch and returns them in
//! input order.
//!
//! Flow per product: interpret (model → parse → normalize, or heuristic) →
//! pair with the untouched product. Each product runs in its own task, at most
//! `concurrency` at a time; a task that panics is replaced by the heuristic
//! assessment so one product can never abort the batch. Tasks live in a
//! `JoinSet` and are aborted if the caller drops the batch.

use std::sync::Arc;

use tokio::sync::Semaphore;
use tokio::task::JoinSet;
use tracing::{error, info};

use crate::errors::AppError;
use crate::stylist::gateway::ModelGateway;
use crate::stylist::heuristic;
use crate::stylist::interpreter::interpret;
use crate::stylist::models::{AnnotatedProduct, Assessment, Product, StyleContext};

pub struct AnnotationPipeline {
    gateway: Arc<dyn ModelGateway>,
    concurrency: usize,
}

impl AnnotationPipeline {
    pub fn new(gateway: Arc<dyn ModelGateway>, concurrency: usize) -> Self {
        Self {
            gateway,
            concurrency: concurrency.max(1),
        }
    }

    pub fn model_initialized(&self) -> bool {
        self.gateway.is_available()
    }

    /// Annotates `products`, preserving count and order.
    ///
    /// The only error is an empty batch, rejected before any model call.
    pub async fn annotate(
        &self,
        ctx: StyleContext,
        products: Vec<Product>,
    ) -> Result<Vec<AnnotatedProduct>, AppError> {
        if products.is_empty() {
            return Err(AppError::Validation(
                "product_list cannot be empty".to_string(),
            ));
        }

        info!(
            "Annotating {} products (concurrency {}, model available: {})",
            products.len(),
            self.concurrency,
            self.gateway.is_available()
        );

        let ctx = Arc::new(ctx);
        let permits = Arc::new(Semaphore::new(self.concurrency));

        // Dropping the set aborts every task, so a cancelled request stops
        // calling the model.
        let mut tasks = JoinSet::new();
        for (index, product) in products.iter().cloned().enumerate() {
            let gateway = Arc::clone(&self.gateway);
            let ctx = Arc::clone(&ctx);
            let permits = Arc::clone(&permits);
            tasks.spawn(async move {
                // The semaphore is never closed, so acquire only fails if it is.
                let _permit = permits.acquire_owned().await.ok();
                (index, interpret(gateway.as_ref(), &ctx, &product).await)
            });
        }

        let mut notes: Vec<Option<Assessment>> = vec![None; products.len()];
        while let Some(joined) = tasks.join_next().await {
            match joined {
                Ok((index, assessment)) => notes[index] = Some(assessment),
                Err(e) => error!("Product task failed: {e}"),
            }
        }

        let annotated = products
            .into_iter()
            .zip(notes)
            .map(|(product, stylist_notes)| {
                let stylist_notes = stylist_notes.unwrap_or_else(|| {
                    error!(
                        "Error processing product {}. Using fallback scoring",
                        product.id
                    );
                    heuristic::score(&ctx, &product)
                });
                AnnotatedProduct::new(product, stylist_notes)
            })
            .collect();

        Ok(annotated)
    }
}
