//! 编辑器入口：把编辑模型和撤销服务组装在一起
//!
//! `EditModel` 只负责编辑和发事件，`UndoService` 只负责记账。
//! `Editor` 订阅模型的文本变更，经由通道收集，每个操作结束后统一提交到撤销栈。
//! 撤销 / 重做产生的变更带有对应的来源标记，提交时被跳过。

use std::path::Path;
use std::sync::mpsc::{self, Receiver};

use crate::core::Position;
use crate::models::{
    DeleteDirection, Direction, EditModel, EditSource, ListenerId, ModelEvent, TextBuffer,
    TextChange, UndoService, DEFAULT_EOL,
};
use crate::services::EditorConfig;

pub struct Editor {
    model: EditModel,
    history: UndoService,
    changes: Receiver<(TextChange, EditSource)>,
    config: EditorConfig,
}

impl Editor {
    /// An unsupported eol marker falls back to the default one.
    pub fn new(mut config: EditorConfig) -> Self {
        if let Err(error) = config.validate() {
            tracing::warn!(error = %error, "invalid editor config, using default eol");
            config.eol = DEFAULT_EOL.to_string();
        }
        let buffer = TextBuffer::new().with_eol(config.eol.clone());
        let mut model = EditModel::new(buffer).with_ignore_eol(config.ignore_eol);
        let history = UndoService::new().with_word_merge(config.merge_word_undo);

        let (tx, rx) = mpsc::channel();
        model.subscribe(move |event| {
            if let ModelEvent::TextChange { change, source } = event {
                let _ = tx.send((change.clone(), *source));
            }
        });

        Self {
            model,
            history,
            changes: rx,
            config,
        }
    }

    /// Loads the config at `path`, falling back to defaults when it is missing or broken.
    pub fn from_config_file(path: &Path) -> Self {
        Self::new(EditorConfig::load_or_default(path))
    }

    pub fn with_text(mut self, text: &str) -> Self {
        self.set_text(text);
        self
    }

    pub fn model(&self) -> &EditModel {
        &self.model
    }

    pub fn history(&self) -> &UndoService {
        &self.history
    }

    pub fn config(&self) -> &EditorConfig {
        &self.config
    }

    pub fn cursor_position(&self) -> Position {
        self.model.cursor().position()
    }

    pub fn subscribe(&mut self, listener: impl FnMut(&ModelEvent) + 'static) -> ListenerId {
        self.model.subscribe(listener)
    }

    pub fn unsubscribe(&mut self, id: ListenerId) -> bool {
        self.model.unsubscribe(id)
    }

    /// 把通道里积压的变更提交到撤销栈
    fn flush(&mut self) {
        while let Ok((change, source)) = self.changes.try_recv() {
            if source.records_history() {
                self.history.commit(&change);
            } else {
                tracing::trace!(source = %source, "change not recorded");
            }
        }
    }

    // ==================== 文档 ====================

    /// 替换整个文档：光标回到开头，历史清空
    pub fn set_text(&mut self, text: &str) {
        self.model.set_text(text);
        self.model.locate(Position::new(0, 0), false);
        self.flush();
        self.history.clear();
        tracing::debug!(lines = self.model.buffer().lines(), "document replaced");
    }

    pub fn text(&self) -> String {
        self.model.buffer().text()
    }

    pub fn copy_text(&self) -> String {
        self.model.copy_text()
    }

    /// 返回与 `copy_text` 相同的文本：没有选区时是当前行加换行符。
    /// 没有选区时先选中当前行再删除；选不到内容时什么也不做，返回空串。
    pub fn cut(&mut self) -> String {
        let text = self.model.copy_text();
        if !self.model.cursor().has_selection() {
            self.model.select_current_line();
        }
        if !self.model.cursor().has_selection() {
            return String::new();
        }
        self.model.delete(DeleteDirection::Backward);
        self.flush();
        text
    }

    // ==================== 编辑 ====================

    pub fn insert(&mut self, text: &str) -> Option<TextChange> {
        let change = self.model.insert(text);
        self.flush();
        change
    }

    pub fn replace(&mut self, text: &str) -> Option<TextChange> {
        let change = self.model.replace(text);
        self.flush();
        change
    }

    pub fn paste(&mut self, text: &str) -> Option<TextChange> {
        self.insert(text)
    }

    pub fn insert_newline(&mut self) -> Option<TextChange> {
        let eol = self.model.buffer().eol().to_string();
        self.insert(&eol)
    }

    pub fn delete(&mut self, direction: DeleteDirection) -> Option<TextChange> {
        let change = self.model.delete(direction);
        self.flush();
        change
    }

    pub fn append(&mut self, text: &str) -> Option<TextChange> {
        let change = self.model.append(text);
        self.flush();
        change
    }

    pub fn append_line(&mut self, text: &str, check_end: bool) -> Option<TextChange> {
        let change = self.model.append_line(text, check_end);
        self.flush();
        change
    }

    pub fn undo(&mut self) -> Option<TextChange> {
        self.flush();
        let change = self.history.undo(&mut self.model);
        self.flush();
        change
    }

    pub fn redo(&mut self) -> Option<TextChange> {
        self.flush();
        let change = self.history.redo(&mut self.model);
        self.flush();
        change
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    // ==================== 光标与选区 ====================

    pub fn move_cursor(&mut self, direction: Direction) -> bool {
        self.model.move_cursor(direction)
    }

    pub fn move_line_start(&mut self) -> bool {
        let line = self.model.cursor().position().line_number;
        self.model.locate(Position::new(line, 0), false)
    }

    pub fn move_line_end(&mut self) -> bool {
        let line = self.model.cursor().position().line_number;
        let column = self.model.buffer().line_length(line);
        self.model.locate(Position::new(line, column), false)
    }

    pub fn locate(&mut self, p: Position) -> bool {
        self.model.locate(p, false)
    }

    pub fn select(&mut self, start: Position, end: Position) -> bool {
        self.model.select(start, end)
    }

    pub fn select_to(&mut self, p: Position) -> bool {
        self.model.select_to(p)
    }

    pub fn select_all(&mut self) -> bool {
        self.model.select_all()
    }

    pub fn select_word(&mut self) -> bool {
        self.model.select_word()
    }

    pub fn select_current_line(&mut self) -> bool {
        self.model.select_current_line()
    }

    pub fn selected_text(&self) -> String {
        self.model.selected_text()
    }

    pub fn prefix_text(&self) -> String {
        self.model.prefix_text()
    }
}

impl Default for Editor {
    fn default() -> Self {
        Self::new(EditorConfig::default())
    }
}

impl std::fmt::Debug for Editor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Editor")
            .field("model", &self.model)
            .field("history", &self.history)
            .field("config", &self.config)
            .finish()
    }
}
