//! Stylesheets injected at runtime

pub const REVEAL_STYLE_ID: &str = "reveal-styles";
pub const SPINNER_STYLE_ID: &str = "spinner-styles";
pub const NOTIFICATION_STYLE_ID: &str = "notification-styles";

/// Terminal state of a revealed element; overrides the inline hidden style
pub fn reveal_css(visible_class: &str) -> String {
    format!(
        ".{visible_class} {{ opacity: 1 !important; transform: translateY(0) !important; }}"
    )
}

pub const SPINNER_CSS: &str = r#"
.spinner {
  width: 16px;
  height: 16px;
  border: 2px solid transparent;
  border-top-color: currentColor;
  border-radius: 50%;
  animation: spin 0.8s linear infinite;
}
@keyframes spin {
  to { transform: rotate(360deg); }
}
"#;

pub const NOTIFICATION_CSS: &str = r#"
.notification {
  position: fixed;
  top: 100px;
  right: 20px;
  padding: 1rem 1.5rem;
  background: var(--bg-card);
  border: 1px solid var(--border-color);
  border-radius: var(--radius-md);
  display: flex;
  align-items: center;
  gap: 1rem;
  z-index: 9999;
  animation: slideInTop 0.3s ease;
  max-width: 400px;
  backdrop-filter: blur(10px);
  box-shadow: 0 10px 40px rgba(0, 0, 0, 0.5);
}
.notification-success { border-color: var(--success); background: rgba(0, 255, 136, 0.1); }
.notification-error { border-color: var(--danger); background: rgba(255, 51, 102, 0.1); }
.notification-warning { border-color: var(--warning); background: rgba(255, 184, 0, 0.1); }
.notification-info { border-color: var(--primary); background: rgba(0, 245, 255, 0.1); }
.notification-close {
  background: none;
  border: none;
  color: var(--text-secondary);
  font-size: 1.5rem;
  cursor: pointer;
  padding: 0;
  line-height: 1;
}
.notification-close:hover { color: var(--text-primary); }
@keyframes slideInTop {
  from { transform: translateY(-100%); opacity: 0; }
  to { transform: translateY(0); opacity: 1; }
}
@keyframes slideOutTop {
  from { transform: translateY(0); opacity: 1; }
  to { transform: translateY(-100%); opacity: 0; }
}
"#;
