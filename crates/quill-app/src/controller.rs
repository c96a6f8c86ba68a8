//! Blog view controller.
//!
//! [`BlogController`] owns everything the front end keeps between user
//! actions: the current view, the session, the last fetched posts and
//! categories, and the form inputs. Every mutation is followed by a refetch
//! of the affected list, and projections are recomputed from those lists on
//! demand. Nothing is patched locally.

use quill_api::{BlogApi, Category, Post, PostPatch};
use quill_config::DisplayConfig;
use tracing::{debug, error};

use crate::error::AppError;
use crate::forms::{CategoryForm, LoginForm, PostForm};
use crate::session::Session;
use crate::view::{Article, Dashboard, DashboardRow, FormMode, HomePage, View, cards};

/// State and actions of the blog front end.
pub struct BlogController<A> {
    api: A,
    session: Session,
    display: DisplayConfig,
    view: View,
    posts: Vec<Post>,
    categories: Vec<Category>,
    login_form: LoginForm,
    post_form: PostForm,
    category_form: CategoryForm,
    editing: Option<String>,
}

impl<A: BlogApi> BlogController<A> {
    #[must_use]
    pub fn new(api: A, session: Session, display: DisplayConfig) -> Self {
        Self {
            api,
            session,
            display,
            view: View::Home,
            posts: Vec::new(),
            categories: Vec::new(),
            login_form: LoginForm::default(),
            post_form: PostForm::default(),
            category_form: CategoryForm::default(),
            editing: None,
        }
    }

    /// Initial load: posts, categories, then the stored session.
    ///
    /// Fetch failures are logged and leave the lists empty.
    pub fn start(&mut self) {
        self.refresh_posts();
        self.refresh_categories();
        self.session.restore(&self.api);
    }

    /// Initial load that stops at the first failed fetch.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Api`] when posts or categories cannot be fetched.
    /// The session is not restored in that case.
    pub fn try_start(&mut self) -> Result<(), AppError> {
        self.load_posts()?;
        self.load_categories()?;
        self.session.restore(&self.api);
        Ok(())
    }

    /// Refetch all posts, drafts included.
    ///
    /// On failure the error is logged and the previous list is kept.
    pub fn refresh_posts(&mut self) {
        if let Err(e) = self.load_posts() {
            error!("Error loading posts: {e}");
        }
    }

    /// Refetch categories, keeping the previous list on failure.
    pub fn refresh_categories(&mut self) {
        if let Err(e) = self.load_categories() {
            error!("Error loading categories: {e}");
        }
    }

    /// Refetch all posts, drafts included.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Api`] when the backend call fails. The previous
    /// list is kept.
    pub fn load_posts(&mut self) -> Result<(), AppError> {
        let posts = self.api.list_posts(false)?;
        debug!("Loaded {} posts", posts.len());
        self.posts = posts;
        Ok(())
    }

    /// Refetch categories.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Api`] when the backend call fails. The previous
    /// list is kept.
    pub fn load_categories(&mut self) -> Result<(), AppError> {
        let categories = self.api.list_categories()?;
        debug!("Loaded {} categories", categories.len());
        self.categories = categories;
        Ok(())
    }

    pub fn navigate(&mut self, view: View) {
        self.view = view;
    }

    /// View to display. The dashboard falls back to the home page without
    /// an authenticated session.
    #[must_use]
    pub fn current_view(&self) -> View {
        match self.view {
            View::Admin if !self.session.is_authenticated() => View::Home,
            view => view,
        }
    }

    /// Log in with the login form's credentials.
    ///
    /// On success the dashboard is shown and the form is cleared. On failure
    /// the form keeps its input.
    ///
    /// # Errors
    ///
    /// See [`Session::login`].
    pub fn login(&mut self) -> Result<(), AppError> {
        let request = self.login_form.to_request();
        self.session.login(&self.api, &request)?;
        self.login_form = LoginForm::default();
        self.view = View::Admin;
        Ok(())
    }

    /// End the session and return to the home page.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Session`] when the stored token cannot be removed.
    pub fn logout(&mut self) -> Result<(), AppError> {
        self.reset_post_form();
        self.view = View::Home;
        self.session.logout()
    }

    /// Save the post form: update the post being edited, or create a new one.
    ///
    /// The form is reset after a successful save.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotAuthenticated`] without a session,
    /// [`AppError::Validation`] for missing fields and [`AppError::Api`] when
    /// the backend rejects the post. The form is kept on error.
    pub fn submit_post(&mut self) -> Result<Post, AppError> {
        let token = self.session.require_token()?;
        self.post_form.validate()?;
        let draft = self.post_form.to_draft();

        let saved = match &self.editing {
            Some(id) => self.api.update_post(token, id, &PostPatch::from(draft))?,
            None => self.api.create_post(token, &draft)?,
        };

        self.refresh_posts();
        self.reset_post_form();
        Ok(saved)
    }

    /// Load a fetched post into the editor.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::PostNotFound`] if the post is not in the fetched list.
    pub fn edit_post(&mut self, id: &str) -> Result<(), AppError> {
        let post = self
            .find_post(id)
            .ok_or_else(|| AppError::PostNotFound(id.to_owned()))?;
        let form = PostForm::from_post(post);
        let post_id = post.id.clone();

        self.post_form = form;
        self.editing = Some(post_id);
        Ok(())
    }

    /// Clear the editor and leave edit mode.
    pub fn reset_post_form(&mut self) {
        self.post_form = PostForm::default();
        self.editing = None;
    }

    /// Delete a post and refetch.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotAuthenticated`] without a session and
    /// [`AppError::Api`] when the backend refuses.
    pub fn delete_post(&mut self, id: &str) -> Result<(), AppError> {
        let token = self.session.require_token()?;
        self.api.delete_post(token, id)?;

        if self.editing.as_deref() == Some(id) {
            self.reset_post_form();
        }
        self.refresh_posts();
        Ok(())
    }

    /// Create a category from the category form and refetch.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotAuthenticated`] without a session,
    /// [`AppError::Validation`] without a name and [`AppError::Api`] when the
    /// backend refuses.
    pub fn create_category(&mut self) -> Result<Category, AppError> {
        let token = self.session.require_token()?;
        self.category_form.validate()?;
        let draft = self.category_form.to_draft();

        let created = self.api.create_category(token, &draft)?;
        self.refresh_categories();
        self.category_form = CategoryForm::default();
        Ok(created)
    }

    /// Home page projection over published posts.
    #[must_use]
    pub fn home_page(&self) -> HomePage {
        let published: Vec<&Post> = self.posts.iter().filter(|p| p.published).collect();
        let split = self.display.featured_posts.min(published.len());
        let (featured, rest) = published.split_at(split);

        HomePage {
            featured: cards(featured, self.display.featured_excerpt_length),
            posts: cards(rest, self.display.card_excerpt_length),
        }
    }

    /// Dashboard projection.
    #[must_use]
    pub fn dashboard(&self) -> Dashboard {
        Dashboard {
            username: self.session.username().map(str::to_owned),
            recent: self
                .posts
                .iter()
                .take(self.display.recent_posts)
                .map(DashboardRow::from)
                .collect(),
            total_posts: self.posts.len(),
            categories: self.categories.iter().map(|c| c.name.clone()).collect(),
            form_mode: match &self.editing {
                Some(id) => FormMode::Edit { id: id.clone() },
                None => FormMode::Create,
            },
        }
    }

    /// Reading view of one post.
    ///
    /// Looks in the fetched list first and asks the backend otherwise.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::PostNotFound`] for unknown IDs and
    /// [`AppError::Api`] for other backend failures.
    pub fn article(&self, id: &str) -> Result<Article, AppError> {
        if let Some(post) = self.find_post(id) {
            return Ok(Article::from(post));
        }

        match self.api.get_post(id) {
            Ok(post) => Ok(Article::from(&post)),
            Err(e) if e.is_not_found() => Err(AppError::PostNotFound(id.to_owned())),
            Err(e) => Err(e.into()),
        }
    }

    fn find_post(&self, id: &str) -> Option<&Post> {
        self.posts.iter().find(|p| p.id == id)
    }

    /// Last fetched posts, newest first, drafts included.
    #[must_use]
    pub fn posts(&self) -> &[Post] {
        &self.posts
    }

    #[must_use]
    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    #[must_use]
    pub fn session(&self) -> &Session {
        &self.session
    }

    /// ID of the post being edited.
    #[must_use]
    pub fn editing(&self) -> Option<&str> {
        self.editing.as_deref()
    }

    pub fn login_form_mut(&mut self) -> &mut LoginForm {
        &mut self.login_form
    }

    #[must_use]
    pub fn login_form(&self) -> &LoginForm {
        &self.login_form
    }

    pub fn post_form_mut(&mut self) -> &mut PostForm {
        &mut self.post_form
    }

    #[must_use]
    pub fn post_form(&self) -> &PostForm {
        &self.post_form
    }

    pub fn category_form_mut(&mut self) -> &mut CategoryForm {
        &mut self.category_form
    }

    #[must_use]
    pub fn api(&self) -> &A {
        &self.api
    }
}
