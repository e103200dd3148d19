use common::model::connection::{Bucket, ConnectionStatus};
use yew::{html, Html};

/// Status icon of a source's last connection.
pub fn connection_icon(status: ConnectionStatus) -> Html {
    let (icon, class) = match status {
        ConnectionStatus::Created | ConnectionStatus::Pending => ("schedule", "status pending"),
        ConnectionStatus::Running => ("autorenew", "status running spin"),
        ConnectionStatus::Completed => ("check_circle", "status success"),
        ConnectionStatus::Failed => ("error", "status danger"),
        ConnectionStatus::Unknown => ("help", "status unknown"),
    };
    html! { <i class={format!("material-icons {}", class)}>{ icon }</i> }
}

/// Heading icon of a connection overlay bucket.
pub fn bucket_icon(bucket: Bucket) -> Html {
    let (icon, class) = match bucket {
        Bucket::Failed => ("error", "status danger"),
        Bucket::UnreachableOrOther => ("warning", "status warning"),
        Bucket::Successful => ("check_circle", "status success"),
    };
    html! { <i class={format!("material-icons {}", class)}>{ icon }</i> }
}
