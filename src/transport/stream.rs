//! Chunked packet transfer over async byte streams.
//!
//! Packages the transport loop the packet protocol assumes: the
//! sender writes one padded wire image, the receiver pulls exactly one
//! chunk per read and appends until the packet reports finished.
//!
//! ```text
//! send side                      recv side
//! ─────────                      ─────────
//! into_wire() ──► write_all ──►  read_exact(chunk) ──► from_bytes
//!                                read_exact(chunk) ──► append_raw
//!                                ...until is_finished()
//! ```
//!
//! The adapters work over anything implementing tokio's stream traits;
//! sockets, pipes, and in-memory duplexes all qualify. Cancellation
//! and timeouts stay with the caller.

use tokio::io::{AsyncRead, AsyncReadExt, AsyncWrite, AsyncWriteExt};

use crate::error::Result;
use crate::protocol::{PacketBuffer, CHUNK_SIZE};

/// Finalize a packet and write its padded wire image to `writer`.
///
/// The packet is consumed; the image length is always a multiple of
/// the packet's chunk size.
pub async fn send_packet<W>(writer: &mut W, packet: PacketBuffer) -> Result<()>
where
    W: AsyncWrite + Unpin,
{
    let logical_len = packet.logical_len();
    let wire = packet.into_wire();
    writer.write_all(&wire).await?;
    writer.flush().await?;
    tracing::trace!(logical_len, wire_len = wire.len(), "packet sent");
    Ok(())
}

/// Receive one packet using the default chunk size.
///
/// Reads exactly [`CHUNK_SIZE`] bytes per transport read and appends
/// until the completion test passes.
pub async fn recv_packet<R>(reader: &mut R) -> Result<PacketBuffer>
where
    R: AsyncRead + Unpin,
{
    recv_packet_with_chunk_size(reader, CHUNK_SIZE).await
}

/// Receive one packet with a custom chunk size.
///
/// Must match the sender's chunk size; the wire carries no record of
/// it.
pub async fn recv_packet_with_chunk_size<R>(
    reader: &mut R,
    chunk_size: usize,
) -> Result<PacketBuffer>
where
    R: AsyncRead + Unpin,
{
    let mut chunk = vec![0u8; chunk_size];
    reader.read_exact(&mut chunk).await?;
    let mut packet = PacketBuffer::from_bytes_with_chunk_size(&chunk, chunk_size)?;
    tracing::trace!(logical_len = packet.logical_len(), "first chunk received");

    while !packet.is_finished() {
        reader.read_exact(&mut chunk).await?;
        packet.append_raw(&chunk)?;
        tracing::trace!(buffered = packet.buffer_len(), "chunk appended");
    }

    tracing::debug!(
        logical_len = packet.logical_len(),
        buffered = packet.buffer_len(),
        "packet complete"
    );
    Ok(packet)
}
