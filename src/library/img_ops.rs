use image::*;

pub type RgbImgBuf = ImageBuffer<Rgb<u8>, Vec<u8>>;

pub fn row_images(images: &[RgbImgBuf]) -> Result<RgbImgBuf, ImageError> {
    //prepare a new buffer wide enough to fit every image side by side.
    //callers have already resized every image to identical dimensions,
    //so no padding is ever needed.
    let (img_x, img_y) = images[0].dimensions();
    let row_num_images = images.len() as u32;

    let mut row_buf: RgbImgBuf = ImageBuffer::new(row_num_images * img_x, img_y);

    for (col_no, img) in images.iter().enumerate() {
        let x_coord = col_no as u32 * img_x;
        row_buf.copy_from(img, x_coord, 0)?;
    }

    Ok(row_buf)
}
